pub mod magnetic;
pub mod pointer;

pub use magnetic::MagneticWiring;
pub use pointer::PointerSubscription;
