mod todo_state;

pub use todo_state::TodoState;
