// crates\mg_foundation\src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `MgError` 枚举和 `MgResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **层次化**: 基础层只定义核心错误，地理相关错误在 mg_geo 中定义
//! 2. **易用性**: 提供便捷的构造方法
//!
//! # 示例
//!
//! ```
//! use mg_foundation::error::{MgError, MgResult};
//!
//! fn parse_degree(s: &str) -> MgResult<f64> {
//!     s.parse()
//!         .map_err(|_| MgError::invalid_input(format!("无法解析角度: {s}")))
//! }
//! ```

use thiserror::Error;

/// 统一结果类型
pub type MgResult<T> = Result<T, MgError>;

/// MarsGeo 错误类型
///
/// 核心错误类型，用于整个项目。坐标转换相关的错误在 `mg_geo` 中扩展。
#[derive(Error, Debug)]
pub enum MgError {
    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },

    /// 数据超出范围
    #[error("数据超出范围: {field}={value}, 期望范围=[{min}, {max}]")]
    OutOfRange {
        /// 字段名
        field: &'static str,
        /// 实际值
        value: f64,
        /// 最小允许值
        min: f64,
        /// 最大允许值
        max: f64,
    },

    /// 内部错误（不应发生的状态）
    #[error("内部错误: {message}")]
    Internal {
        /// 错误描述
        message: String,
    },
}

// ============================================================================
// 便捷构造函数
// ============================================================================

impl MgError {
    /// 创建无效输入错误
    #[inline]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// 创建超出范围错误
    #[inline]
    pub fn out_of_range(field: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }

    /// 创建内部错误
    #[inline]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// 检查条件，不满足则提前返回给定错误
///
/// # 示例
///
/// ```
/// use mg_foundation::{ensure, error::{MgError, MgResult}};
///
/// fn check_zone(zone: u8) -> MgResult<()> {
///     ensure!((1..=60).contains(&zone), MgError::invalid_input("带号越界"));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err.into());
        }
    };
}

// ============================================================================
// 测试
// ============================================================================
