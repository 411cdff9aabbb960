pub mod raster;
pub mod report;
