//! File collection from the picker input and drag-and-drop.
//!
//! Both sources are normalized into a flat ordered `Vec<File>`. Dropped
//! directories are walked recursively through the FileSystem entry API,
//! whose callbacks are bridged into async/await with oneshot channels.
//!
//! No size or type filtering happens here; the backend decides what it
//! can process.

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    DragEvent, File, FileList, FileSystemDirectoryEntry, FileSystemDirectoryReader,
    FileSystemEntry, FileSystemFileEntry,
};

/// What a drop event carried.
///
/// Entries must be captured synchronously inside the drop handler; the
/// `DataTransfer` items are gone once the handler returns. Resolving the
/// entries into files happens afterwards in [`flatten`].
pub enum DroppedItems {
    /// Structured entries (files and/or directories).
    Entries(Vec<FileSystemEntry>),
    /// Plain file list, for platforms without the entry API.
    Plain(Vec<File>),
}

/// Capture the contents of a drop event. Synchronous on purpose.
pub fn read_drop(event: &DragEvent) -> DroppedItems {
    let Some(data) = event.data_transfer() else {
        return DroppedItems::Plain(Vec::new());
    };

    let items = data.items();
    let mut entries = Vec::new();
    for i in 0..items.length() {
        let Some(item) = items.get(i) else { continue };
        if item.kind() != "file" {
            continue;
        }
        if let Ok(Some(entry)) = item.webkit_get_as_entry() {
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        // Older engines expose only the flat file list.
        let files = data.files().map(|l| list_files(&l)).unwrap_or_default();
        DroppedItems::Plain(files)
    } else {
        DroppedItems::Entries(entries)
    }
}

/// Resolve dropped items into a flat file list.
///
/// Sibling order within a directory follows whatever the platform
/// reader yields; callers must not rely on it.
pub async fn flatten(items: DroppedItems) -> Vec<File> {
    match items {
        DroppedItems::Plain(files) => files,
        DroppedItems::Entries(entries) => {
            let mut out = Vec::new();
            for entry in entries {
                traverse_entry(entry, &mut out).await;
            }
            out
        }
    }
}

/// Flatten a `FileList` (from an input element or a legacy drop).
pub fn list_files(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Client-name suggestion from a directory-scoped selection: the top
/// path segment of the first file that has a relative path.
pub fn folder_name(files: &[File]) -> Option<String> {
    files.iter().find_map(|file| {
        let path = js_sys::Reflect::get(file.as_ref(), &"webkitRelativePath".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        let top = path.split('/').next()?;
        (!top.is_empty()).then(|| top.to_string())
    })
}

/// Walk one entry, appending every file underneath it to `out`.
fn traverse_entry(entry: FileSystemEntry, out: &mut Vec<File>) -> LocalBoxFuture<'_, ()> {
    async move {
        if entry.is_file() {
            let file_entry: FileSystemFileEntry = entry.unchecked_into();
            if let Some(file) = resolve_file(&file_entry).await {
                out.push(file);
            }
        } else if entry.is_directory() {
            let dir: FileSystemDirectoryEntry = entry.unchecked_into();
            let reader = dir.create_reader();
            loop {
                // readEntries caps each batch (100 on Chromium); keep
                // draining until it comes back empty.
                let batch = read_batch(&reader).await;
                if batch.is_empty() {
                    break;
                }
                for child in batch {
                    traverse_entry(child, out).await;
                }
            }
        }
    }
    .boxed_local()
}

/// Resolve a file entry into its `File` via the callback API.
async fn resolve_file(entry: &FileSystemFileEntry) -> Option<File> {
    let (tx, rx) = oneshot::channel();
    let callback = Closure::once_into_js(move |file: File| {
        let _ = tx.send(file);
    });
    entry.file_with_callback(callback.unchecked_ref());
    rx.await.ok()
}

/// One `readEntries` call, as a future.
async fn read_batch(reader: &FileSystemDirectoryReader) -> Vec<FileSystemEntry> {
    let (tx, rx) = oneshot::channel();
    let callback = Closure::once_into_js(move |entries: js_sys::Array| {
        let batch: Vec<FileSystemEntry> = entries
            .iter()
            .map(|e| e.unchecked_into::<FileSystemEntry>())
            .collect();
        let _ = tx.send(batch);
    });
    if reader
        .read_entries_with_callback(callback.unchecked_ref())
        .is_err()
    {
        return Vec::new();
    }
    rx.await.unwrap_or_default()
}
