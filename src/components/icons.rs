//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap icons.

use archive_viewer_core::FileKind;
use icondata::Icon;

// =============================================================================
// Icon Set
// =============================================================================

mod bootstrap {
    pub use icondata::{
        BsArchive as FileArchive, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsCodeSlash as FileCode, BsDownload as Download, BsFileEarmark as File,
        BsFileEarmarkExcel as FileSpreadsheet, BsFileEarmarkImage as FileImage,
        BsFileEarmarkMusic as FileAudio, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkPlay as FileVideo, BsFileEarmarkPpt as FilePresentation,
        BsFileEarmarkText as FileText, BsFileEarmarkWord as FileDocument, BsFolderFill as Folder,
        BsGrid as Grid, BsHouseFill as Home, BsListUl as List, BsMoonStarsFill as Moon,
        BsSunFill as Sun, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants
// =============================================================================

pub const CHEVRON_LEFT: Icon = bootstrap::ChevronLeft;
pub const CHEVRON_RIGHT: Icon = bootstrap::ChevronRight;
pub const HOME: Icon = bootstrap::Home;
pub const FOLDER: Icon = bootstrap::Folder;
pub const FILE: Icon = bootstrap::File;
pub const FILE_TEXT: Icon = bootstrap::FileText;
pub const FILE_PDF: Icon = bootstrap::FilePdf;
pub const FILE_IMAGE: Icon = bootstrap::FileImage;
pub const FILE_DOCUMENT: Icon = bootstrap::FileDocument;
pub const FILE_SPREADSHEET: Icon = bootstrap::FileSpreadsheet;
pub const FILE_PRESENTATION: Icon = bootstrap::FilePresentation;
pub const FILE_ARCHIVE: Icon = bootstrap::FileArchive;
pub const FILE_AUDIO: Icon = bootstrap::FileAudio;
pub const FILE_VIDEO: Icon = bootstrap::FileVideo;
pub const FILE_CODE: Icon = bootstrap::FileCode;
pub const LIST: Icon = bootstrap::List;
pub const GRID: Icon = bootstrap::Grid;
pub const CLOSE: Icon = bootstrap::Close;
pub const DOWNLOAD: Icon = bootstrap::Download;
pub const SUN: Icon = bootstrap::Sun;
pub const MOON: Icon = bootstrap::Moon;

/// Icon for a listing entry; `None` means a folder.
pub fn for_kind(kind: Option<FileKind>) -> Icon {
    match kind {
        None => FOLDER,
        Some(FileKind::Pdf) => FILE_PDF,
        Some(FileKind::Document) => FILE_DOCUMENT,
        Some(FileKind::Spreadsheet) => FILE_SPREADSHEET,
        Some(FileKind::Presentation) => FILE_PRESENTATION,
        Some(FileKind::Archive) => FILE_ARCHIVE,
        Some(FileKind::Text) => FILE_TEXT,
        Some(FileKind::Image) => FILE_IMAGE,
        Some(FileKind::Audio) => FILE_AUDIO,
        Some(FileKind::Video) => FILE_VIDEO,
        Some(FileKind::Code) => FILE_CODE,
        Some(FileKind::Other) => FILE,
    }
}
