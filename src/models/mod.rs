mod category;
mod inventory;
mod location;
mod product;
mod user;

pub use category::*;
pub use inventory::*;
pub use location::*;
pub use product::*;
pub use user::*;
