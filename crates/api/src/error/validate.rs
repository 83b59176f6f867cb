//! Validation utilities shared by every checked entry point
//!
//! Each helper logs the rejected arguments at debug level before returning
//! the error, so callers only need `?`.

use super::{Error, Result};

/// Validate that a raw pointer argument is present
#[inline(always)]
pub fn non_null<T>(ptr: *const T, name: &'static str) -> Result<()> {
    if ptr.is_null() {
        log::debug!("rejected null {}", name);
        return Err(Error::null(name));
    }
    Ok(())
}

/// Validate that a signed offset or count is not negative, returning it as `usize`
#[inline(always)]
pub fn non_negative(value: isize, name: &'static str) -> Result<usize> {
    if value < 0 {
        log::debug!("rejected negative {}: {}", name, value);
        return Err(Error::range(name, 0, isize::MAX as usize));
    }
    Ok(value as usize)
}

/// Validate that `width` bytes starting at `offset` fit in a buffer of `len` bytes
#[inline(always)]
pub fn offset(name: &'static str, offset: usize, width: usize, len: usize) -> Result<()> {
    if len < width || offset > len - width {
        let limit = len.saturating_sub(width);
        log::debug!(
            "rejected {} {}: {} bytes do not fit in a buffer of {} (limit {})",
            name,
            offset,
            width,
            len,
            limit
        );
        return Err(Error::range(name, offset, limit));
    }
    Ok(())
}

/// Compute the byte span of `count` elements of `width` bytes
#[inline(always)]
pub fn span(count: usize, width: usize) -> Result<usize> {
    match count.checked_mul(width) {
        Some(span) => Ok(span),
        None => {
            log::debug!("rejected count {}: span of {}-byte elements overflows", count, width);
            Err(Error::range("count", count, usize::MAX / width))
        }
    }
}

/// Validate that `value` does not exceed `limit`
#[inline(always)]
pub fn at_most(name: &'static str, value: usize, limit: usize) -> Result<()> {
    if value > limit {
        log::debug!("rejected {} {}: exceeds {}", name, value, limit);
        return Err(Error::range(name, value, limit));
    }
    Ok(())
}

/// Validate that `offset` indexes into an array of `len` elements
#[inline(always)]
pub fn start(name: &'static str, offset: usize, len: usize) -> Result<()> {
    if offset >= len {
        log::debug!("rejected {} {}: array length is {}", name, offset, len);
        return Err(Error::range(name, offset, len));
    }
    Ok(())
}

/// Validate that `extent` elements starting at `offset` stay in bounds
#[inline(always)]
pub fn extent(name: &'static str, offset: usize, extent: usize, len: usize) -> Result<()> {
    if offset.checked_add(extent).map_or(true, |end| end > len) {
        let end = offset.saturating_add(extent);
        log::debug!("rejected {} {}: span ends at {} past length {}", name, offset, end, len);
        return Err(Error::combination(name, end, len));
    }
    Ok(())
}
