// crates\mg_geo\src\datum.rs
//! 坐标系定义和转换器
//!
//! 提供 [`Datum`] 枚举（WGS-84 / GCJ-02 / BD-09）和显式指定源、目标
//! 坐标系的 [`DatumTransformer`]。转换器只做调度，不重复任何公式，
//! 全部委托给 [`crate::transform`] 中的六个单向函数。
//!
//! # 示例
//!
//! ```
//! use mg_geo::datum::{Datum, DatumTransformer};
//!
//! let transformer = DatumTransformer::new(Datum::Wgs84, Datum::Bd09);
//! let (lon, lat) = transformer.transform(116.404, 39.915).unwrap();
//! assert!(lon > 116.404);
//! ```

use crate::error::{GeoError, GeoResult};
use crate::geometry::LonLat;
use crate::transform;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// 坐标系枚举
// ============================================================================

/// 支持的坐标系
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Datum {
    /// WGS-84 国际 GPS 坐标系
    Wgs84,
    /// GCJ-02 国测局坐标系（"火星坐标"）
    Gcj02,
    /// BD-09 百度坐标系
    Bd09,
}

impl Datum {
    /// 坐标系显示名称
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wgs84 => "WGS-84",
            Self::Gcj02 => "GCJ-02",
            Self::Bd09 => "BD-09",
        }
    }

    /// 是否为加偏坐标系
    ///
    /// GCJ-02 和 BD-09 都在真实坐标上叠加了偏移。
    #[must_use]
    pub fn is_obfuscated(&self) -> bool {
        !matches!(self, Self::Wgs84)
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Datum {
    type Err = GeoError;

    /// 从常见别名解析坐标系名称（大小写不敏感）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wgs84" | "wgs-84" | "epsg:4326" | "gps" => Ok(Self::Wgs84),
            "gcj02" | "gcj-02" | "mars" => Ok(Self::Gcj02),
            "bd09" | "bd-09" | "bd09ll" | "baidu" => Ok(Self::Bd09),
            _ => Err(GeoError::unknown_datum(s)),
        }
    }
}

// ============================================================================
// 坐标系转换器
// ============================================================================

/// 坐标系转换器
///
/// 源、目标坐标系由调用方显式给定，不做任何自动识别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatumTransformer {
    source: Datum,
    target: Datum,
}

impl DatumTransformer {
    /// 创建新的坐标系转换器
    #[must_use]
    pub fn new(source: Datum, target: Datum) -> Self {
        Self { source, target }
    }

    /// 正向转换单点：源坐标系 -> 目标坐标系
    ///
    /// # Errors
    /// - 坐标含 NaN/Inf 时返回错误
    /// - 途经 GCJ→WGS 反解且不收敛时返回错误
    #[inline]
    pub fn transform(&self, lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
        dispatch(self.source, self.target, lon, lat)
    }

    /// 逆向转换单点：目标坐标系 -> 源坐标系
    ///
    /// # Errors
    /// 同 [`Self::transform`]
    #[inline]
    pub fn inverse(&self, lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
        dispatch(self.target, self.source, lon, lat)
    }

    /// 正向转换类型化坐标点
    ///
    /// # Errors
    /// 同 [`Self::transform`]
    pub fn transform_point(&self, p: LonLat) -> GeoResult<LonLat> {
        let (lon, lat) = self.transform(p.lon, p.lat)?;
        Ok(LonLat::new(lon, lat))
    }

    /// 是否为恒等变换
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.source == self.target
    }

    /// 获取源坐标系
    #[must_use]
    pub fn source(&self) -> Datum {
        self.source
    }

    /// 获取目标坐标系
    #[must_use]
    pub fn target(&self) -> Datum {
        self.target
    }
}

/// 坐标系对到转换函数的调度
fn dispatch(source: Datum, target: Datum, lon: f64, lat: f64) -> GeoResult<(f64, f64)> {
    use Datum::{Bd09, Gcj02, Wgs84};

    match (source, target) {
        (Wgs84, Wgs84) | (Gcj02, Gcj02) | (Bd09, Bd09) => transform::check_lonlat(lon, lat),
        (Wgs84, Gcj02) => transform::wgs84_to_gcj02(lon, lat),
        (Wgs84, Bd09) => transform::wgs84_to_bd09(lon, lat),
        (Gcj02, Wgs84) => transform::gcj02_to_wgs84(lon, lat),
        (Gcj02, Bd09) => transform::gcj02_to_bd09(lon, lat),
        (Bd09, Wgs84) => transform::bd09_to_wgs84(lon, lat),
        (Bd09, Gcj02) => transform::bd09_to_gcj02(lon, lat),
    }
}

// ============================================================================
// 测试
// ============================================================================
