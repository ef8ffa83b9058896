//! Interactive console loop
//!
//! Renders the numbered menu, prompts for input and dispatches to the
//! task store. Core errors are caught here and rendered as plain text;
//! they never abort the session. The loop is written against generic
//! reader/writer handles so whole sessions can be driven by scripted
//! tests.

use std::io::{self, BufRead, Write};

use todo_core::task::{validate_description, validate_title, TaskStore};
use todo_core::Error;

pub struct Console<R, W> {
    input: R,
    output: W,
    store: TaskStore,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, store: TaskStore) -> Self {
        Self {
            input,
            output,
            store,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\nWelcome to the In-Memory Todo Console Application!"
        )?;
        writeln!(
            self.output,
            "All data is stored in memory and will be lost when you exit."
        )?;

        loop {
            self.show_menu()?;

            let Some(choice) = self.prompt("\nEnter your choice (1-6): ")? else {
                break;
            };
            match choice.trim() {
                "1" => self.add_task()?,
                "2" => self.view_tasks()?,
                "3" => self.update_task()?,
                "4" => self.delete_task()?,
                "5" => self.toggle_task()?,
                "6" => {
                    writeln!(
                        self.output,
                        "\nThank you for using the Todo Console Application!"
                    )?;
                    writeln!(
                        self.output,
                        "All tasks have been cleared from memory. Goodbye!"
                    )?;
                    break;
                }
                other => {
                    tracing::debug!("Rejected menu choice {:?}", other);
                    writeln!(
                        self.output,
                        "\nError: invalid choice, please enter a number between 1 and 6"
                    )?;
                }
            }
        }

        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=".repeat(50))?;
        writeln!(self.output, "         TODO CONSOLE APPLICATION")?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        writeln!(self.output, "1. Add Task")?;
        writeln!(self.output, "2. View Tasks")?;
        writeln!(self.output, "3. Update Task")?;
        writeln!(self.output, "4. Delete Task")?;
        writeln!(self.output, "5. Mark Complete/Incomplete")?;
        writeln!(self.output, "6. Exit")?;
        writeln!(self.output, "{}", "=".repeat(50))?;
        Ok(())
    }

    /// Write a prompt and read one line. Returns `None` when input ends.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Prompt for a task ID. Non-numeric input gets a plain error line and
    /// returns the user to the menu, as does end of input.
    fn prompt_id(&mut self, text: &str) -> io::Result<Option<u64>> {
        let Some(input) = self.prompt(text)? else {
            return Ok(None);
        };
        match input.trim().parse::<u64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.output, "Error: please enter a valid number")?;
                Ok(None)
            }
        }
    }

    fn add_task(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Add New Task ---")?;

        // Re-prompt until the title validates; the description gets the
        // same treatment since oversized input is rejected, not truncated.
        let title = loop {
            let Some(input) = self.prompt("Enter task title: ")? else {
                return Ok(());
            };
            match validate_title(&input) {
                Ok(title) => break title,
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        };

        let description = loop {
            let Some(input) =
                self.prompt("Enter task description (optional, press Enter to skip): ")?
            else {
                return Ok(());
            };
            match validate_description(&input) {
                Ok(description) => break description,
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        };

        match self.store.add(&title, &description) {
            Ok(task) => {
                writeln!(self.output, "\nSuccess! Task created with ID {}", task.id)?;
                writeln!(self.output, "Title: {}", task.title)?;
                writeln!(self.output, "Status: {}", task.status)?;
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn view_tasks(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- All Tasks ---")?;

        if self.store.is_empty() {
            writeln!(
                self.output,
                "\nNo tasks found. Add your first task to get started!"
            )?;
            return Ok(());
        }

        for task in self.store.list() {
            let description = if task.description.is_empty() {
                "[no description]"
            } else {
                task.description.as_str()
            };
            writeln!(self.output, "\n{}", "-".repeat(50))?;
            writeln!(self.output, "ID: {}", task.id)?;
            writeln!(self.output, "Title: {}", task.title)?;
            writeln!(self.output, "Description: {}", description)?;
            writeln!(self.output, "Status: {}", task.status)?;
        }
        writeln!(self.output, "{}", "-".repeat(50))?;
        writeln!(self.output, "\nTotal tasks: {}", self.store.len())?;
        Ok(())
    }

    fn update_task(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Update Task ---")?;

        let Some(id) = self.prompt_id("Enter task ID to update: ")? else {
            return Ok(());
        };
        let (current_title, current_description) = match self.store.get(id) {
            Some(task) => (task.title.clone(), task.description.clone()),
            None => {
                writeln!(self.output, "Error: {}", Error::TaskNotFound(id))?;
                return Ok(());
            }
        };

        writeln!(self.output, "\nCurrent title: {}", current_title)?;
        if current_description.is_empty() {
            writeln!(self.output, "Current description: [no description]")?;
        } else {
            writeln!(self.output, "Current description: {}", current_description)?;
        }

        // Pressing Enter keeps the current value of a field.
        let new_title = loop {
            let Some(input) = self.prompt("\nEnter new title (or press Enter to keep current): ")?
            else {
                return Ok(());
            };
            if input.trim().is_empty() {
                break None;
            }
            match validate_title(&input) {
                Ok(title) => break Some(title),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        };

        let new_description = loop {
            let Some(input) =
                self.prompt("Enter new description (or press Enter to keep current): ")?
            else {
                return Ok(());
            };
            if input.is_empty() {
                break None;
            }
            match validate_description(&input) {
                Ok(description) => break Some(description),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        };

        match self
            .store
            .update(id, new_title.as_deref(), new_description.as_deref())
        {
            Ok(task) => {
                writeln!(self.output, "\nSuccess! Task ID {} updated", task.id)?;
                writeln!(self.output, "New title: {}", task.title)?;
                if task.description.is_empty() {
                    writeln!(self.output, "New description: [no description]")?;
                } else {
                    writeln!(self.output, "New description: {}", task.description)?;
                }
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn delete_task(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Delete Task ---")?;

        let Some(id) = self.prompt_id("Enter task ID to delete: ")? else {
            return Ok(());
        };
        match self.store.delete(id) {
            Ok(task) => {
                writeln!(self.output, "\nDeleted task:")?;
                writeln!(self.output, "ID: {}", task.id)?;
                writeln!(self.output, "Title: {}", task.title)?;
                writeln!(self.output, "\nTask ID {} deleted successfully", id)?;
            }
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }

    fn toggle_task(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- Mark Complete/Incomplete ---")?;

        let Some(id) = self.prompt_id("Enter task ID: ")? else {
            return Ok(());
        };
        if let Some(task) = self.store.get(id) {
            let status = task.status;
            writeln!(self.output, "\nCurrent status: {}", status)?;
        }
        match self.store.toggle_status(id) {
            Ok(task) => writeln!(self.output, "\nTask ID {} marked as {}", id, task.status)?,
            Err(e) => writeln!(self.output, "Error: {}", e)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(script: &str) -> String {
        let mut output = Vec::new();
        {
            let mut console = Console::new(script.as_bytes(), &mut output, TaskStore::new());
            console.run().unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_and_view_session() {
        let output = run_session("1\nBuy milk\n\n2\n6\n");

        assert!(output.contains("Success! Task created with ID 1"));
        assert!(output.contains("Title: Buy milk"));
        assert!(output.contains("Description: [no description]"));
        assert!(output.contains("Status: Pending"));
        assert!(output.contains("Total tasks: 1"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_view_empty_store() {
        let output = run_session("2\n6\n");
        assert!(output.contains("No tasks found. Add your first task to get started!"));
    }

    #[test]
    fn test_empty_title_is_reprompted() {
        let output = run_session("1\n\n   \nBuy milk\n\n6\n");

        assert_eq!(
            output
                .matches("Error: Invalid input: title cannot be empty")
                .count(),
            2
        );
        assert!(output.contains("Success! Task created with ID 1"));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let output = run_session("9\n6\n");
        assert!(output.contains("Error: invalid choice"));
    }

    #[test]
    fn test_non_numeric_id_returns_to_menu() {
        let output = run_session("3\nabc\n6\n");
        assert!(output.contains("Error: please enter a valid number"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_update_keeps_fields_on_enter() {
        // Add "Buy milk" with a description, then update only the
        // description while keeping the title.
        let output = run_session("1\nBuy milk\nFrom store\n3\n1\n\nOat milk instead\n2\n6\n");

        assert!(output.contains("Current title: Buy milk"));
        assert!(output.contains("Current description: From store"));
        assert!(output.contains("Success! Task ID 1 updated"));
        assert!(output.contains("New title: Buy milk"));
        assert!(output.contains("New description: Oat milk instead"));
        assert!(output.contains("Description: Oat milk instead"));
    }

    #[test]
    fn test_update_missing_id() {
        let output = run_session("3\n42\n6\n");
        assert!(output.contains("Error: Task ID 42 not found"));
    }

    #[test]
    fn test_toggle_twice_restores_status() {
        let output = run_session("1\nBuy milk\n\n5\n1\n5\n1\n6\n");

        assert!(output.contains("Task ID 1 marked as Completed"));
        assert!(output.contains("Task ID 1 marked as Pending"));
    }

    #[test]
    fn test_delete_flow() {
        let output = run_session("1\nBuy milk\n\n4\n1\n2\n6\n");

        assert!(output.contains("Task ID 1 deleted successfully"));
        assert!(output.contains("No tasks found"));
    }

    #[test]
    fn test_delete_missing_id() {
        let output = run_session("4\n99\n6\n");
        assert!(output.contains("Error: Task ID 99 not found"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let output = run_session("");
        assert!(output.contains("TODO CONSOLE APPLICATION"));
        assert!(!output.contains("Goodbye!"));
    }
}
