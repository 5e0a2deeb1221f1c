//! Pages
//!
//! One component per hash route.

mod home;
mod login;
mod register;
mod todo;

pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use todo::TodoPage;
