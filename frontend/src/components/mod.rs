pub mod gauge;
pub mod results;
pub mod template;
pub mod toast;
