//! Demo tasks shown when the app starts without `--empty`.

use crate::model::Task;

struct Seed {
    id: u64,
    text: &'static str,
    completed: bool,
}

const DEMO_SEEDS: [Seed; 5] = [
    Seed {
        id: 5,
        text: "Work for PetReady Inc.",
        completed: false,
    },
    Seed {
        id: 4,
        text: "Get the job",
        completed: false,
    },
    Seed {
        id: 3,
        text: "Impress recruiters",
        completed: false,
    },
    Seed {
        id: 2,
        text: "Submit assessment",
        completed: true,
    },
    Seed {
        id: 1,
        text: "Create todo app",
        completed: true,
    },
];

pub fn demo_tasks() -> Vec<Task> {
    DEMO_SEEDS
        .iter()
        .map(|seed| Task {
            id: seed.id,
            text: seed.text.to_string(),
            completed: seed.completed,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn demo_list_has_three_open_and_two_done() {
        let tasks = demo_tasks();
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks.iter().filter(|t| !t.completed).count(), 3);
        assert_eq!(
            tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![5, 4, 3, 2, 1]
        );
    }
}
