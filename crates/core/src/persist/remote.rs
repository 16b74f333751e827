//! Remote persistence over the `/todos` REST resource

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::task::Task;
use crate::Result;

use super::wire::WireTodo;
use super::PersistenceAdapter;

/// HTTP-backed persistence adapter.
///
/// `save` reconciles the desired list against the last state observed on
/// the server, issuing one request per changed task. A partially applied
/// save reports failure; the next successful save converges the remote
/// copy, since every save targets the full desired list.
pub struct RemoteAdapter {
    base_url: String,
    client: reqwest::Client,
    remote: RwLock<Option<Vec<WireTodo>>>,
}

/// Requests needed to turn `known` into `desired`
#[derive(Debug, Default, PartialEq)]
pub(crate) struct SyncPlan {
    pub creates: Vec<WireTodo>,
    pub updates: Vec<WireTodo>,
    pub deletes: Vec<Uuid>,
}

/// Diff the desired list against the last-known remote state.
///
/// Only title and status changes generate a PUT; a bare timestamp refresh
/// is not worth a round trip.
pub(crate) fn plan_sync(known: &[WireTodo], desired: &[WireTodo]) -> SyncPlan {
    let mut plan = SyncPlan::default();

    for todo in desired {
        match known.iter().find(|k| k.id == todo.id) {
            None => plan.creates.push(todo.clone()),
            Some(k) if k.title != todo.title || k.status != todo.status => {
                plan.updates.push(todo.clone())
            }
            Some(_) => {}
        }
    }
    for k in known {
        if !desired.iter().any(|t| t.id == k.id) {
            plan.deletes.push(k.id);
        }
    }

    plan
}

impl RemoteAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            remote: RwLock::new(None),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: Uuid) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    async fn fetch_all(&self) -> Result<Vec<WireTodo>> {
        let todos = self
            .client
            .get(self.todos_url())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<WireTodo>>()
            .await?;
        Ok(todos)
    }

    /// Apply the plan, keeping `known` in step with each request that lands
    async fn apply(&self, plan: SyncPlan, known: &mut Vec<WireTodo>) -> Result<()> {
        for id in plan.deletes {
            debug!(%id, "DELETE todo");
            self.client
                .delete(self.todo_url(id))
                .send()
                .await?
                .error_for_status()?;
            known.retain(|k| k.id != id);
        }
        for todo in plan.updates {
            debug!(id = %todo.id, "PUT todo");
            self.client
                .put(self.todo_url(todo.id))
                .json(&todo)
                .send()
                .await?
                .error_for_status()?;
            if let Some(k) = known.iter_mut().find(|k| k.id == todo.id) {
                *k = todo;
            }
        }
        for todo in plan.creates {
            debug!(id = %todo.id, "POST todo");
            self.client
                .post(self.todos_url())
                .json(&todo)
                .send()
                .await?
                .error_for_status()?;
            known.push(todo);
        }
        Ok(())
    }
}

#[async_trait]
impl PersistenceAdapter for RemoteAdapter {
    async fn load(&self) -> Result<Vec<Task>> {
        let todos = self.fetch_all().await?;
        let tasks = todos.iter().cloned().map(Task::from).collect();
        *self.remote.write().await = Some(todos);
        Ok(tasks)
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        let desired: Vec<WireTodo> = tasks.iter().map(WireTodo::from).collect();

        let mut remote = self.remote.write().await;
        let mut known = match remote.take() {
            Some(known) => known,
            None => self.fetch_all().await?,
        };

        let plan = plan_sync(&known, &desired);
        let result = self.apply(plan, &mut known).await;
        *remote = Some(known);
        result
    }
}
