//! Extension-based file categorization.
//!
//! A fixed table maps each category to the extensions it recognizes. The table
//! is inverted once into a [`FileMapper`], which answers "which folder does
//! this extension belong in?" with a single hash lookup.
//!
//! # Examples
//!
//! ```
//! use organize::file_category::{Category, FileMapper};
//!
//! let mapper = FileMapper::default();
//! assert_eq!(mapper.classify(".mp3"), Category::Music);
//! assert_eq!(mapper.classify(".PDF"), Category::Documents);
//! assert_eq!(mapper.classify(".unknownext"), Category::Others);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// A destination bucket for organized files.
///
/// Every variant corresponds to one subfolder created under the organized
/// directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Executables, installers and scripts
    Programs,
    /// Text, office and markup documents
    Documents,
    /// Archives and disk images
    Compressed,
    /// Audio files
    Music,
    /// Video files
    Video,
    /// Raster, vector and camera-raw images
    Images,
    /// Anything not matched by another category
    Others,
}

impl Category {
    /// Every category, including the uncategorized default.
    pub const ALL: [Category; 7] = [
        Category::Programs,
        Category::Documents,
        Category::Compressed,
        Category::Music,
        Category::Video,
        Category::Images,
        Category::Others,
    ];

    /// Returns the subfolder name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use organize::file_category::Category;
    ///
    /// assert_eq!(Category::Music.dir_name(), "Music");
    /// assert_eq!(Category::Others.dir_name(), "Others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Programs => "Programs",
            Category::Documents => "Documents",
            Category::Compressed => "Compressed",
            Category::Music => "Music",
            Category::Video => "Video",
            Category::Images => "Images",
            Category::Others => "Others",
        }
    }

    /// Returns the extensions this category claims, each with a leading `.`.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Category::Programs => &[
                ".exe", ".msi", ".bat", ".sh", ".apk", ".app", ".jar", ".cmd", ".gadget", ".wsf",
                ".deb", ".rpm", ".bin", ".com", ".vbs", ".ps1",
            ],
            Category::Documents => &[
                ".pdf", ".doc", ".docx", ".txt", ".ppt", ".pptx", ".xls", ".xlsx", ".odt", ".csv",
                ".rtf", ".tex", ".epub", ".md", ".log", ".json", ".xml", ".yaml", ".yml", ".ini",
            ],
            Category::Compressed => &[
                ".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz", ".iso", ".cab", ".arj",
                ".lzh", ".ace", ".uue", ".tar.gz", ".tar.bz2", ".tar.xz",
            ],
            Category::Music => &[
                ".mp3", ".wav", ".aac", ".flac", ".ogg", ".m4a", ".wma", ".alac", ".amr", ".aiff",
                ".opus", ".mid", ".midi",
            ],
            Category::Video => &[
                ".mp4", ".mkv", ".avi", ".mov", ".wmv", ".flv", ".webm", ".mpeg", ".mpg", ".m4v",
                ".3gp", ".3g2", ".vob", ".ogv", ".rm", ".rmvb", ".ts", ".m2ts",
            ],
            Category::Images => &[
                ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".tif", ".webp", ".svg", ".ico",
                ".heic", ".raw", ".psd", ".ai", ".indd", ".eps", ".jfif", ".apng", ".avif", ".cr2",
                ".nef", ".orf", ".sr2",
            ],
            Category::Others => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Maps file extensions to categories.
///
/// Keys are lower-cased and always carry a leading `.`, so lookups are
/// case-insensitive. When two categories claim the same extension the one
/// inserted last wins.
#[derive(Debug, Clone)]
pub struct FileMapper {
    extension_map: HashMap<String, Category>,
}

impl FileMapper {
    /// Creates a new `FileMapper` by inverting the standard category table.
    pub fn new() -> Self {
        let mut mapper = Self {
            extension_map: HashMap::new(),
        };
        for category in Category::ALL {
            for ext in category.extensions() {
                mapper.add_extension_mapping(ext, category);
            }
        }
        mapper
    }

    /// Adds or replaces an extension to category mapping.
    pub fn add_extension_mapping(&mut self, ext: &str, category: Category) {
        self.extension_map.insert(normalize(ext), category);
    }

    /// Number of distinct extensions known to the mapper.
    pub fn len(&self) -> usize {
        self.extension_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extension_map.is_empty()
    }

    /// Classifies an extension token such as `.txt`.
    ///
    /// The leading `.` is optional. Unknown and empty extensions fall into
    /// [`Category::Others`]; this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use organize::file_category::{Category, FileMapper};
    ///
    /// let mapper = FileMapper::default();
    /// assert_eq!(mapper.classify(".TXT"), Category::Documents);
    /// assert_eq!(mapper.classify("png"), Category::Images);
    /// assert_eq!(mapper.classify(""), Category::Others);
    /// ```
    pub fn classify(&self, ext: &str) -> Category {
        self.extension_map
            .get(&normalize(ext))
            .copied()
            .unwrap_or(Category::Others)
    }

    /// Classifies a file by the final extension of its name.
    ///
    /// Returns `None` when the name has no extension token at all
    /// (`README`, `.bashrc`). A trailing dot counts as an empty extension and
    /// classifies as [`Category::Others`].
    pub fn classify_path(&self, path: &Path) -> Option<Category> {
        let ext = path.extension()?;
        Some(self.classify(&ext.to_string_lossy()))
    }
}

impl Default for FileMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(ext: &str) -> String {
    let lower = ext.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dir_names() {
        assert_eq!(Category::Programs.dir_name(), "Programs");
        assert_eq!(Category::Documents.dir_name(), "Documents");
        assert_eq!(Category::Compressed.dir_name(), "Compressed");
        assert_eq!(Category::Music.dir_name(), "Music");
        assert_eq!(Category::Video.dir_name(), "Video");
        assert_eq!(Category::Images.dir_name(), "Images");
        assert_eq!(Category::Others.dir_name(), "Others");
    }

    #[test]
    fn test_others_has_no_extensions() {
        assert!(Category::Others.extensions().is_empty());
    }

    #[test]
    fn test_table_has_no_duplicate_extensions() {
        let total: usize = Category::ALL.iter().map(|c| c.extensions().len()).sum();
        assert_eq!(FileMapper::default().len(), total);
    }

    #[test]
    fn test_every_table_extension_round_trips() {
        let mapper = FileMapper::default();
        for category in Category::ALL {
            for ext in category.extensions() {
                assert_eq!(mapper.classify(ext), category, "extension {}", ext);
            }
        }
    }

    #[test]
    fn test_classify_case_insensitive() {
        let mapper = FileMapper::default();
        for category in Category::ALL {
            for ext in category.extensions() {
                let upper = ext.to_uppercase();
                let mixed: String = ext
                    .chars()
                    .enumerate()
                    .map(|(i, c)| {
                        if i % 2 == 0 {
                            c.to_ascii_uppercase()
                        } else {
                            c
                        }
                    })
                    .collect();
                assert_eq!(mapper.classify(&upper), category);
                assert_eq!(mapper.classify(&mixed), category);
            }
        }
    }

    #[test]
    fn test_classify_unknown_defaults_to_others() {
        let mapper = FileMapper::default();
        assert_eq!(mapper.classify(".unknownext"), Category::Others);
        assert_eq!(mapper.classify(".rs"), Category::Others);
        assert_eq!(mapper.classify(""), Category::Others);
        assert_eq!(mapper.classify("."), Category::Others);
    }

    #[test]
    fn test_classify_without_leading_dot() {
        let mapper = FileMapper::default();
        assert_eq!(mapper.classify("mp3"), Category::Music);
        assert_eq!(mapper.classify("MKV"), Category::Video);
    }

    #[test]
    fn test_classify_path() {
        let mapper = FileMapper::default();
        assert_eq!(
            mapper.classify_path(Path::new("report.PDF")),
            Some(Category::Documents)
        );
        assert_eq!(
            mapper.classify_path(Path::new("backup.tar.gz")),
            Some(Category::Compressed)
        );
        assert_eq!(
            mapper.classify_path(Path::new("notes.")),
            Some(Category::Others)
        );
        assert_eq!(mapper.classify_path(Path::new("README")), None);
        assert_eq!(mapper.classify_path(Path::new(".bashrc")), None);
    }

    #[test]
    fn test_custom_mapping_last_writer_wins() {
        let mut mapper = FileMapper::default();
        mapper.add_extension_mapping("TXT", Category::Others);
        mapper.add_extension_mapping(".rs", Category::Programs);

        assert_eq!(mapper.classify(".txt"), Category::Others);
        assert_eq!(mapper.classify(".rs"), Category::Programs);
    }
}
