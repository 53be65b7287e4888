// crates\mg_geo\src/lib.rs
//! MarsGeo 坐标系转换模块
//!
//! 提供 WGS-84、GCJ-02（"火星坐标"）、BD-09 三种坐标系之间的
//! 单点转换。
//!
//! # 模块
//!
//! - `datum`: 坐标系定义和转换器
//! - `ellipsoid`: 椭球体参数
//! - `error`: 错误类型
//! - `geometry`: 几何类型 (LonLat)
//! - `transform`: 六个方向的转换函数
//!
//! # 示例
//!
//! ```
//! use mg_geo::prelude::*;
//!
//! // 函数接口
//! let (g_lon, g_lat) = wgs84_to_gcj02(116.404, 39.915).unwrap();
//!
//! // 转换器接口
//! let transformer = DatumTransformer::new(Datum::Gcj02, Datum::Bd09);
//! let (b_lon, b_lat) = transformer.transform(g_lon, g_lat).unwrap();
//! assert!(b_lon > g_lon);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod datum;
pub mod ellipsoid;
pub mod error;
pub mod geometry;
pub mod transform;

/// 预导入模块
pub mod prelude {
    pub use crate::datum::{Datum, DatumTransformer};
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::error::{GeoError, GeoResult};
    pub use crate::geometry::LonLat;
    pub use crate::transform::{
        bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, out_of_china,
        wgs84_to_bd09, wgs84_to_gcj02,
    };
}

// 重导出常用类型
pub use datum::{Datum, DatumTransformer};
pub use ellipsoid::Ellipsoid;
pub use error::{GeoError, GeoResult};
pub use geometry::LonLat;
pub use transform::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, out_of_china, wgs84_to_bd09,
    wgs84_to_gcj02,
};
