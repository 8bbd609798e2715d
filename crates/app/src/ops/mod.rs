pub mod cat;
pub mod create;
pub mod grant;
pub mod grants;
pub mod ls;
pub mod rm;
pub mod write;

pub use cat::Cat;
pub use create::Create;
pub use grant::Grant;
pub use grants::Grants;
pub use ls::Ls;
pub use rm::Rm;
pub use write::Write;
