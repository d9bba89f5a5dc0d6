pub mod accounts_table {
    mod component;
    pub use component::*;
}
pub mod empty_state {
    mod component;
    pub use component::*;
}
pub mod header {
    mod component;
    pub use component::*;
}
pub mod request_form {
    mod component;
    pub use component::*;
}
