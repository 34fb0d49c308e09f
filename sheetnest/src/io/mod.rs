/// External (serializable) representations of jobs and outcomes
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
