//! kinofetch: fetch film/series metadata from kinopoisk.dev, reconcile it
//! with the unofficial cast API, and export the result to spreadsheet
//! formats.

pub mod pipeline;

pub use pipeline::{
    CastEntry, CastOrigin, Export, ExportFormat, FilmRecord, PipelineError, Result, Session,
    export,
};
