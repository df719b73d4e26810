pub mod fft;
pub mod noise;
pub mod sampler;
pub mod smoothness;
pub mod spectrum;
