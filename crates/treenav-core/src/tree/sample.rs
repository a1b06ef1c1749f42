//! Demonstration content for a fresh session.

use crate::clock::SharedClock;
use crate::error::CoreResult;
use crate::tree::file_tree::FileTree;

/// `(folder, sub-folder, [files])` for each top-level sample folder.
const SAMPLE_FOLDERS: [(&str, &str, [&str; 2]); 4] = [
    ("Folder 1", "a", ["aatde", "lorem"]),
    ("Folder 2", "b", ["nanana", "anan"]),
    ("Folder 3", "c", ["NANANA", "MirA"]),
    ("Folder 4", "d", ["hiyahiya", "bcda"]),
];

const SAMPLE_ROOT_FILES: [&str; 2] = ["abab", "ABCD"];

impl FileTree {
    /// A tree pre-populated with four folders, each holding one sub-folder
    /// and two `.txt` files, plus two `.txt` files at the root.
    pub fn with_sample_content(root_name: &str, clock: SharedClock) -> CoreResult<Self> {
        let mut tree = Self::with_clock(root_name, clock);
        let root = tree.root();

        let mut top = Vec::with_capacity(SAMPLE_FOLDERS.len());
        for (name, _, _) in SAMPLE_FOLDERS {
            let folder = tree.make_folder(name);
            top.extend(tree.add_child(root, folder)?);
        }
        for name in SAMPLE_ROOT_FILES {
            let file = tree.make_file(name, "txt");
            tree.add_child(root, file)?;
        }
        for (parent, (_, child, files)) in top.into_iter().zip(SAMPLE_FOLDERS) {
            let sub = tree.make_folder(child);
            tree.add_child(parent, sub)?;
            for name in files {
                let file = tree.make_file(name, "txt");
                tree.add_child(parent, file)?;
            }
        }

        tracing::debug!(entities = tree.len(), "sample tree built");
        Ok(tree)
    }
}
