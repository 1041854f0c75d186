// Task-Modul: Enthält alle Embassy Tasks
//
// Der Port-Task besitzt das Port-Wort exklusiv, andere Tasks greifen
// nicht darauf zu.

pub mod port;

// Re-export Tasks für einfachen Import
pub use port::port_task;
