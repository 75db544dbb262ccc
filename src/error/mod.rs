mod spendlens;

pub use spendlens::SpendlensError;
