use chrono::NaiveDate;
use serde::Serialize;

use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub line: usize,
    pub state: &'static str,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<NaiveDate>,
}

impl TaskJson {
    pub fn new(line: usize, task: &Task) -> TaskJson {
        let (state, completed) = match task {
            Task::Blank => ("blank", None),
            Task::Open { .. } => ("open", None),
            Task::Done { completed, .. } => ("done", *completed),
        };
        TaskJson {
            line,
            state,
            text: task.print(),
            completed,
        }
    }
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub file: String,
    pub tasks: Vec<TaskJson>,
}
