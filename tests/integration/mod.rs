mod gradient;
mod rounding;
mod size;
