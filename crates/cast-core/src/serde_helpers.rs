//! Predicates for `skip_serializing_if`: default values are left out of the JSON.

#[allow(clippy::trivially_copy_pass_by_ref)]
pub const fn is_false(value: &bool) -> bool {
    !*value
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub const fn is_zero(value: &i32) -> bool {
    *value == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub const fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}
