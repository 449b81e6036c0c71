use crate::constants::VIDEO_FILENAME_PATTERN;
use crate::error::{Hi3510Error, Result};
use chrono::{DateTime, Local, NaiveDate};
use regex::{Captures, Regex};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// A recording on local disk, timestamped from its filename.
#[derive(Debug, Clone, Serialize)]
pub struct Video {
    pub path: PathBuf,
    pub filename: String,
    pub date: DateTime<Local>,
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.filename, self.date)
    }
}

/// Directory of recordings named `YYMMDD_HHMMSS.mp4`.
pub struct VideoStorage {
    path: PathBuf,
    pattern: Regex,
}

impl VideoStorage {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_dir() {
            return Err(Hi3510Error::StorageError(format!(
                "{} is not a directory",
                path.display()
            )));
        }

        let pattern = Regex::new(VIDEO_FILENAME_PATTERN)
            .map_err(|err| Hi3510Error::StorageError(err.to_string()))?;

        Ok(Self { path, pattern })
    }

    /// Enumerate recordings, skipping anything whose name does not carry a
    /// valid timestamp.
    pub async fn video_files(&self) -> Result<Vec<Video>> {
        let mut dir = tokio::fs::read_dir(&self.path).await?;
        let mut videos = Vec::new();

        while let Some(entry) = dir.next_entry().await? {
            let filename = entry.file_name().to_string_lossy().into_owned();
            let Some(groups) = self.pattern.captures(&filename) else {
                continue;
            };

            match parse_timestamp(&groups) {
                Some(date) => videos.push(Video {
                    path: self.path.join(&filename),
                    filename,
                    date,
                }),
                None => debug!("skipping {filename}: timestamp is not a valid date"),
            }
        }

        Ok(videos)
    }
}

// Filenames carry two-digit years, 2000-based.
fn parse_timestamp(groups: &Captures<'_>) -> Option<DateTime<Local>> {
    let field = |idx: usize| groups[idx].parse::<u32>().ok();
    let (year, month, day) = (field(1)?, field(2)?, field(3)?);
    let (hour, minute, second) = (field(4)?, field(5)?, field(6)?);

    NaiveDate::from_ymd_opt(2000 + year as i32, month, day)?
        .and_hms_opt(hour, minute, second)?
        .and_local_timezone(Local)
        .single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use std::fs::File;
    use tempfile::tempdir;

    #[tokio::test]
    async fn filenames_parse_into_timestamps() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("151223_142945.mp4")).unwrap();

        let storage = VideoStorage::new(dir.path()).unwrap();
        let videos = storage.video_files().await.unwrap();

        assert_eq!(videos.len(), 1);
        let video = &videos[0];
        assert_eq!(video.filename, "151223_142945.mp4");
        assert_eq!(video.path, dir.path().join("151223_142945.mp4"));
        let date = video.date;
        assert_eq!(
            (date.year(), date.month(), date.day()),
            (2015, 12, 23)
        );
        assert_eq!(
            (date.hour(), date.minute(), date.second()),
            (14, 29, 45)
        );
    }

    #[tokio::test]
    async fn non_matching_names_are_skipped() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("holiday.mp4")).unwrap();
        File::create(dir.path().join("151223_142945.avi")).unwrap();
        File::create(dir.path().join("151223-142945.mp4")).unwrap();
        File::create(dir.path().join("160101_000000.mp4")).unwrap();

        let storage = VideoStorage::new(dir.path()).unwrap();
        let videos = storage.video_files().await.unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].filename, "160101_000000.mp4");
    }

    #[tokio::test]
    async fn impossible_dates_are_skipped() {
        let dir = tempdir().unwrap();
        // Month 13, hour 25
        File::create(dir.path().join("151323_142945.mp4")).unwrap();
        File::create(dir.path().join("151223_252945.mp4")).unwrap();

        let storage = VideoStorage::new(dir.path()).unwrap();
        assert!(storage.video_files().await.unwrap().is_empty());
    }

    #[test]
    fn a_plain_file_is_not_a_storage_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("151223_142945.mp4");
        File::create(&file).unwrap();

        assert!(VideoStorage::new(&file).is_err());
    }

    #[tokio::test]
    async fn display_shows_filename_and_date() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("151223_142945.mp4")).unwrap();

        let storage = VideoStorage::new(dir.path()).unwrap();
        let videos = storage.video_files().await.unwrap();
        let rendered = videos[0].to_string();

        assert!(rendered.starts_with("151223_142945.mp4 ["));
        assert!(rendered.contains("2015-12-23 14:29:45"));
    }
}
