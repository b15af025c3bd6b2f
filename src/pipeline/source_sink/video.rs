//! `opencv`-backed `FrameSource`/`FrameSink` (§4.1, §6.1-6.3). Decodes
//! any container the installed build of OpenCV can demux, yielding BGR
//! rasters; encodes with a caller-selected fourcc. This is the only
//! module in the crate that talks to an external decoder/encoder — kept
//! behind the `video-io` feature so the cipher core and its tests never
//! need OpenCV installed.

use opencv::core::{Mat, Size, CV_8UC3};
use opencv::prelude::*;
use opencv::videoio::{VideoCapture, VideoWriter, CAP_ANY};

use crate::cipher::Frame;
use crate::pipeline::source_sink::{FrameSink, FrameSource, OutputCodec, SinkConfig, SourceSinkError};

fn opencv_err(e: opencv::Error) -> SourceSinkError {
    SourceSinkError::Decode(e.to_string())
}

fn mat_to_frame(mat: &Mat) -> Result<Frame, SourceSinkError> {
    let rows = mat.rows() as usize;
    let cols = mat.cols() as usize;
    let bytes = mat.data_bytes().map_err(opencv_err)?;
    if bytes.len() != rows * cols * 3 {
        return Err(SourceSinkError::Decode(format!(
            "unexpected raster size: got {} bytes for {}x{}x3",
            bytes.len(),
            rows,
            cols
        )));
    }
    Ok(Frame::new(rows, cols, bytes.to_vec()))
}

fn frame_to_mat(frame: &Frame) -> Result<Mat, SourceSinkError> {
    let rows = frame.height() as i32;
    let cols = frame.width() as i32;
    let mut mat = Mat::new_rows_cols_with_default(rows, cols, CV_8UC3, opencv::core::Scalar::all(0.0))
        .map_err(opencv_err)?;
    mat.data_bytes_mut().map_err(opencv_err)?.copy_from_slice(frame.as_bytes());
    Ok(mat)
}

/// Decodes frames from any container OpenCV's `VideoCapture` supports.
pub struct VideoFileSource {
    capture: VideoCapture,
    height: usize,
    width: usize,
    frame_rate: f64,
    frame_count: Option<u64>,
}

impl VideoFileSource {
    pub fn open(path: &std::path::Path) -> Result<Self, SourceSinkError> {
        let capture = VideoCapture::from_file(&path.to_string_lossy(), CAP_ANY).map_err(opencv_err)?;
        if !capture.is_opened().map_err(opencv_err)? {
            return Err(SourceSinkError::Decode(format!("could not open {}", path.display())));
        }

        let height = capture
            .get(opencv::videoio::CAP_PROP_FRAME_HEIGHT)
            .map_err(opencv_err)? as usize;
        let width = capture
            .get(opencv::videoio::CAP_PROP_FRAME_WIDTH)
            .map_err(opencv_err)? as usize;
        let frame_rate = capture.get(opencv::videoio::CAP_PROP_FPS).map_err(opencv_err)?;
        let raw_count = capture.get(opencv::videoio::CAP_PROP_FRAME_COUNT).map_err(opencv_err)?;
        let frame_count = if raw_count > 0.0 { Some(raw_count as u64) } else { None };

        Ok(Self { capture, height, width, frame_rate, frame_count })
    }
}

impl FrameSource for VideoFileSource {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    fn frame_count(&self) -> Option<u64> {
        self.frame_count
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, SourceSinkError> {
        let mut mat = Mat::default();
        let ok = self.capture.read(&mut mat).map_err(opencv_err)?;
        if !ok || mat.empty() {
            return Ok(None);
        }
        Ok(Some(mat_to_frame(&mat)?))
    }
}

/// Encodes frames with a caller-selected fourcc. `HFYU` for encrypted
/// output (lossless, §6.2); `mp4v` is the reference default for
/// decrypted output (§6.3).
pub struct VideoFileSink {
    writer: VideoWriter,
    config: SinkConfig,
}

impl VideoFileSink {
    pub fn create(path: &std::path::Path, config: SinkConfig) -> Result<Self, SourceSinkError> {
        let [a, b, c, d] = config.codec.fourcc();
        let fourcc = VideoWriter::fourcc(a, b, c, d).map_err(opencv_err)?;
        let size = Size::new(config.width as i32, config.height as i32);
        let writer = VideoWriter::new(
            &path.to_string_lossy(),
            fourcc,
            config.frame_rate,
            size,
            true,
        )
        .map_err(opencv_err)?;
        if !writer.is_opened().map_err(opencv_err)? {
            return Err(SourceSinkError::Encode(format!("could not open {} for writing", path.display())));
        }
        Ok(Self { writer, config })
    }
}

impl FrameSink for VideoFileSink {
    fn write_frame(&mut self, frame: &Frame) -> Result<(), SourceSinkError> {
        let expected = (self.config.height, self.config.width);
        let actual = (frame.height(), frame.width());
        if expected != actual {
            return Err(SourceSinkError::DimensionMismatch { expected, actual });
        }
        let mat = frame_to_mat(frame)?;
        self.writer.write(&mat).map_err(opencv_err)?;
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), SourceSinkError> {
        self.writer.release().map_err(opencv_err)?;
        Ok(())
    }
}
