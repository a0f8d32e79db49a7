//! Domain records for the shop.
//!
//! Records are plain values copied in and out of the store on every call.
//! Types named `New*` describe a row before the database assigns its id;
//! repositories return the full record read back with `RETURNING`.

pub mod cart;
pub mod category;
pub mod order;
pub mod payment;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use category::{NewCategory, ProductCategory};
pub use order::{NewOrder, Order, OrderItem};
pub use payment::{NewPayment, Payment};
pub use product::{NewProduct, Product};
pub use user::{NewUser, User};
