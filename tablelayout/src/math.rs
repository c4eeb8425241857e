#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("tablelayout requires either the `std` or the `libm` feature for float math");

#[cfg(feature = "std")]
pub(crate) fn ceil(value: f32) -> f32 {
    value.ceil()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn ceil(value: f32) -> f32 {
    libm::ceilf(value)
}
