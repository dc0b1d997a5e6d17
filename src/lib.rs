//! Static dashboard for the 1854 London cholera outbreak datasets:
//! delimited files in, one HTML page of tables, charts, and a pump map out.

pub mod figures;
pub mod ingest;
pub mod page;
pub mod serve;
pub mod series;
