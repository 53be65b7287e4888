// crates\mg_foundation\src/float.rs

//! 数值常量和安全浮点数工具
//!
//! 提供浮点数有限性检查、安全除法和容差比较。
//!
//! # 设计目标
//!
//! 1. **数值安全**: 在边界处保证浮点数非 NaN、非 Inf
//! 2. **零开销**: release 模式下只剩一次 `is_finite` 分支

use crate::error::{MgError, MgResult};

// ============================================================================
// 数值常量
// ============================================================================

/// 浮点数相等性比较的默认容差
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// 安全除法的最小分母阈值
pub const SAFE_DIV_EPSILON: f64 = 1e-14;

/// 迭代求解器的默认最大迭代次数
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// 迭代求解器的默认收敛容差
pub const DEFAULT_CONVERGENCE_TOL: f64 = 1e-6;

// ============================================================================
// 安全浮点数工具
// ============================================================================

/// 检查浮点数是否有限，否则返回 [`MgError::InvalidInput`]
///
/// # Errors
/// 输入为 NaN 或 ±Inf 时返回错误，错误信息包含字段名。
#[inline]
pub fn check_finite(field: &'static str, value: f64) -> MgResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MgError::invalid_input(format!(
            "{field} 不是有限数值: {value}"
        )))
    }
}

/// 安全除法：分母绝对值小于 [`SAFE_DIV_EPSILON`] 时返回 `None`
#[inline]
#[must_use]
pub fn safe_div(num: f64, den: f64) -> Option<f64> {
    if den.abs() < SAFE_DIV_EPSILON {
        None
    } else {
        Some(num / den)
    }
}

/// 带容差的浮点数相等比较
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

// ============================================================================
// 测试
// ============================================================================
