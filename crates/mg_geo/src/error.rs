// crates\mg_geo\src\error.rs
//! 坐标系转换错误类型
//!
//! 包含坐标验证和迭代反解相关的错误。
//! 所有错误可转换为 `mg_foundation::MgError` 向上传播。
//!
//! # 错误分类
//!
//! - **验证错误**：坐标含 NaN/Inf、坐标系名称无法识别
//! - **计算错误**：迭代反解不收敛
//! - **基础错误**：来自 Foundation 层

use mg_foundation::MgError;
use thiserror::Error;

/// Geo 模块结果类型
pub type GeoResult<T> = Result<T, GeoError>;

/// 坐标系转换错误
#[derive(Error, Debug)]
pub enum GeoError {
    /// 坐标分量不是有限数值
    #[error("{axis} 不是有限数值: {value}")]
    NonFiniteCoordinate {
        /// 坐标轴名称（"经度" 或 "纬度"）
        axis: &'static str,
        /// 非法的浮点值（NaN 或 ±Inf）
        value: f64,
    },

    /// 迭代反解不收敛
    #[error("GCJ-02 迭代反解在 {max_iterations} 次内未收敛")]
    InverseNotConverged {
        /// 允许的最大迭代次数
        max_iterations: usize,
    },

    /// 未知的坐标系名称
    #[error("未知的坐标系名称: {name} (支持: wgs84, gcj02, bd09)")]
    UnknownDatum {
        /// 无法识别的名称
        name: String,
    },

    /// 基础层错误（向下聚合）
    #[error("基础层错误: {0}")]
    Foundation(#[from] MgError),
}

// ============================================================================
// 便捷构造函数
// ============================================================================

impl GeoError {
    /// 创建非有限坐标错误
    #[inline]
    pub fn non_finite_coordinate(axis: &'static str, value: f64) -> Self {
        Self::NonFiniteCoordinate { axis, value }
    }

    /// 创建迭代不收敛错误
    #[inline]
    pub fn inverse_not_converged(max_iterations: usize) -> Self {
        Self::InverseNotConverged { max_iterations }
    }

    /// 创建未知坐标系错误
    #[inline]
    pub fn unknown_datum(name: impl Into<String>) -> Self {
        Self::UnknownDatum { name: name.into() }
    }
}

// ============================================================================
// 转换实现
// ============================================================================

impl From<GeoError> for MgError {
    fn from(err: GeoError) -> Self {
        match err {
            GeoError::NonFiniteCoordinate { axis, value } => {
                MgError::invalid_input(format!("{axis} 不是有限数值: {value}"))
            }
            GeoError::InverseNotConverged { max_iterations } => {
                MgError::internal(format!("GCJ-02 迭代反解在 {max_iterations} 次内未收敛"))
            }
            GeoError::UnknownDatum { name } => {
                MgError::invalid_input(format!("未知的坐标系名称: {name}"))
            }
            GeoError::Foundation(e) => e,
        }
    }
}

// ============================================================================
// 测试
// ============================================================================
