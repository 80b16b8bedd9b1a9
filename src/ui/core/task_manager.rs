use super::actions::{Action, DialogType, HomeData, MountId, ScreenData, Tab};
use crate::backend::{BackendError, ResumeBackend};
use crate::platform::LinkOpener;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Fetch everything `tab` shows.
///
/// The home screen needs three collections; it is ready only when all of
/// them succeed and fails as soon as any one of them fails.
pub async fn load_screen(backend: &dyn ResumeBackend, tab: Tab) -> Result<ScreenData, BackendError> {
    match tab {
        Tab::Profile => {
            let (profile, achievements, education) =
                tokio::try_join!(backend.get_profile(), backend.get_achievements(), backend.get_education())?;
            Ok(ScreenData::Home(Box::new(HomeData {
                profile,
                achievements,
                education,
            })))
        }
        Tab::Experience => Ok(ScreenData::Experience(backend.get_experiences().await?)),
        Tab::Skills => Ok(ScreenData::Skills(backend.get_skills_by_category().await?)),
        Tab::Projects => Ok(ScreenData::Projects(backend.get_projects().await?)),
        Tab::Contact => Ok(ScreenData::Contact(Box::new(backend.get_profile().await?))),
    }
}

pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn track(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Spawn the fetch-on-mount for `tab`, tagging the result with `mount`.
    ///
    /// Earlier loads are left running; their results carry an older mount id
    /// and are dropped on arrival.
    pub fn spawn_screen_load(&mut self, backend: Arc<dyn ResumeBackend>, tab: Tab, mount: MountId) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Load {} (mount {})", tab.title(), mount);

        let handle = tokio::spawn(async move {
            let action = match load_screen(backend.as_ref(), tab).await {
                Ok(data) => Action::ScreenLoaded { mount, data },
                Err(e) => Action::ScreenFailed {
                    mount,
                    tab,
                    error: e.to_string(),
                },
            };
            let _ = action_sender.send(action);
        });

        self.track(handle, description)
    }

    /// Hand `url` to the platform off the UI thread. A failure surfaces as a
    /// notice carrying `fallback`.
    pub fn spawn_link_open(&mut self, opener: Arc<dyn LinkOpener>, url: String, fallback: String) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Open {}", url);

        let handle = tokio::spawn(async move {
            let target = url.clone();
            let outcome = tokio::task::spawn_blocking(move || opener.open(&target)).await;
            let failed = match outcome {
                Ok(Ok(())) => false,
                Ok(Err(e)) => {
                    log::warn!("{}", e);
                    true
                }
                Err(e) => {
                    log::warn!("Link opener for {} did not finish: {}", url, e);
                    true
                }
            };
            if failed {
                let _ = action_sender.send(Action::ShowDialog(DialogType::Notice(fallback)));
            }
        });

        self.track(handle, description)
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        finished
            .into_iter()
            .filter_map(|task_id| self.tasks.remove(&task_id).map(|task| (task_id, task.description)))
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
