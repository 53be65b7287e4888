// crates\mg_geo\src\geometry.rs
//! 几何类型定义
//!
//! 提供类型化的经纬度坐标点 [`LonLat`] 和基于 Haversine 公式的
//! 地理距离计算。

use mg_foundation::float::check_finite;
use mg_foundation::MgResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 地球平均半径 (米) - 用于 Haversine 公式
pub const EARTH_MEAN_RADIUS: f64 = 6_371_008.8;

/// 经纬度坐标点（度）
///
/// 分量顺序固定为 (经度, 纬度)，与本 crate 所有接口一致。
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    /// 经度 (度)
    pub lon: f64,
    /// 纬度 (度)
    pub lat: f64,
}

impl LonLat {
    /// 创建新的坐标点
    #[inline]
    #[must_use]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// 创建坐标点并验证分量有限
    ///
    /// # Errors
    /// 任一分量为 NaN/Inf 时返回错误
    pub fn try_new(lon: f64, lat: f64) -> MgResult<Self> {
        let lon = check_finite("经度", lon)?;
        let lat = check_finite("纬度", lat)?;
        Ok(Self { lon, lat })
    }

    /// 转为 (经度, 纬度) 元组
    #[inline]
    #[must_use]
    pub const fn as_tuple(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }

    /// 两个分量是否都是有限数值
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Haversine 地理距离 (米)
    ///
    /// 按平均半径球体计算，适合度量公里级以下的偏移量。
    #[must_use]
    pub fn geodesic_distance_to(&self, other: &Self) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let h = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_MEAN_RADIUS * h.sqrt().asin()
    }
}

impl From<(f64, f64)> for LonLat {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

impl From<LonLat> for (f64, f64) {
    fn from(p: LonLat) -> Self {
        (p.lon, p.lat)
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

// ============================================================================
// 测试
// ============================================================================
