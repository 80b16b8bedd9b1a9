#[path = "backend/fixture.rs"]
mod fixture;
#[path = "backend/http.rs"]
mod http;
