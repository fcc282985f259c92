pub mod recebee;

pub use self::recebee::Recebee;
