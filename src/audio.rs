pub mod synth;
pub mod tone;
