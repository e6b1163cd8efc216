pub mod authenticate;
pub(crate) mod extract;
pub mod jwt;
pub mod password;
