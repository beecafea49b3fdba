//! Task repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Every query is constrained to `user_uuid`; a task owned by another user
//!   is indistinguishable from a missing one.
//! - `mark_done` is a single atomic UPDATE (flag set + session increment).

use crate::model::task::{Priority, Task, TaskId};
use crate::model::user::UserId;
use crate::repo::{bool_to_int, int_to_bool, map_owner_error, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    uuid,
    user_uuid,
    title,
    description,
    priority,
    is_done,
    pomodoro_sessions,
    due_at,
    created_at
FROM tasks";

pub trait TaskRepository {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId>;
    fn get_task(&self, user_id: UserId, task_id: TaskId) -> RepoResult<Option<Task>>;
    /// All tasks of one user, newest first.
    fn list_tasks(&self, user_id: UserId) -> RepoResult<Vec<Task>>;
    /// Sets `is_done` and increments `pomodoro_sessions` by one.
    fn mark_done(&self, user_id: UserId, task_id: TaskId) -> RepoResult<()>;
    /// Incomplete tasks with `priority = high`.
    fn count_pending_high_priority(&self, user_id: UserId) -> RepoResult<u32>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &Task) -> RepoResult<TaskId> {
        task.validate()?;

        self.conn.execute(
            "INSERT INTO tasks (
                uuid,
                user_uuid,
                title,
                description,
                priority,
                is_done,
                pomodoro_sessions,
                due_at,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                task.id.to_string(),
                task.user_id.to_string(),
                task.title.as_str(),
                task.description.as_str(),
                task.priority.as_str(),
                bool_to_int(task.is_done),
                task.pomodoro_sessions,
                task.due_at,
                task.created_at,
            ],
        )
        .map_err(|err| map_owner_error(err, task.user_id))?;

        Ok(task.id)
    }

    fn get_task(&self, user_id: UserId, task_id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL}
             WHERE uuid = ?1
               AND user_uuid = ?2;"
        ))?;
        let mut rows = stmt.query(params![task_id.to_string(), user_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }
        Ok(None)
    }

    fn list_tasks(&self, user_id: UserId) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL}
             WHERE user_uuid = ?1
             ORDER BY created_at DESC, rowid DESC;"
        ))?;
        let mut rows = stmt.query([user_id.to_string()])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }

    fn mark_done(&self, user_id: UserId, task_id: TaskId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                is_done = 1,
                pomodoro_sessions = pomodoro_sessions + 1
             WHERE uuid = ?1
               AND user_uuid = ?2;",
            params![task_id.to_string(), user_id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "task",
                id: task_id,
            });
        }
        Ok(())
    }

    fn count_pending_high_priority(&self, user_id: UserId) -> RepoResult<u32> {
        let count: u32 = self.conn.query_row(
            "SELECT COUNT(*)
             FROM tasks
             WHERE user_uuid = ?1
               AND is_done = 0
               AND priority = 'high';",
            [user_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let user_text: String = row.get("user_uuid")?;
    let priority_text: String = row.get("priority")?;
    let priority = Priority::parse(&priority_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority `{priority_text}` in tasks.priority"
        ))
    })?;

    let task = Task {
        id: parse_uuid(&uuid_text, "tasks.uuid")?,
        user_id: parse_uuid(&user_text, "tasks.user_uuid")?,
        title: row.get("title")?,
        description: row.get("description")?,
        priority,
        is_done: int_to_bool(row.get("is_done")?, "tasks.is_done")?,
        pomodoro_sessions: row.get("pomodoro_sessions")?,
        due_at: row.get("due_at")?,
        created_at: row.get("created_at")?,
    };
    task.validate()?;
    Ok(task)
}
