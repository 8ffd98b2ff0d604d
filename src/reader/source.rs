//! Where the reader's text comes from.

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::error::Error;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A source of text addressed by path.
///
/// The reader opens a resource, reads it to the end once, then releases it.
/// `open` and `release` return futures that own what they need, so the
/// reader can run them as independent stages.
pub trait TextSource: Send + Sync + 'static {
    /// An open handle, exclusively owned by one read.
    type Resource: Send + 'static;

    /// Opens `path` for shared reading.
    ///
    /// A missing resource is reported as
    /// [`ErrorKind::NotFound`](crate::ErrorKind::NotFound), an unreadable one
    /// as [`ErrorKind::AccessDenied`](crate::ErrorKind::AccessDenied).
    fn open(&self, path: &str) -> BoxFuture<'static, Result<Self::Resource, Error>>;

    /// Reads the whole resource as text.
    fn read_all<'a>(&'a self, resource: &'a mut Self::Resource) -> BoxFuture<'a, Result<String, Error>>;

    /// Releases the resource.
    fn release(&self, resource: Self::Resource) -> BoxFuture<'static, Result<(), Error>>;
}

/// Reads files through `tokio::fs`.
///
/// Files are opened read-only and a leading UTF-8 byte order mark is dropped.
/// Invalid UTF-8 is reported as
/// [`ErrorKind::IoFault`](crate::ErrorKind::IoFault).
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl TextSource for FileSource {
    type Resource = File;

    fn open(&self, path: &str) -> BoxFuture<'static, Result<File, Error>> {
        let path = path.to_owned();
        async move { Ok::<_, Error>(File::open(path).await?) }.boxed()
    }

    fn read_all<'a>(&'a self, file: &'a mut File) -> BoxFuture<'a, Result<String, Error>> {
        async move {
            let mut content = String::new();
            file.read_to_string(&mut content).await?;
            if content.starts_with(BYTE_ORDER_MARK) {
                content.drain(..BYTE_ORDER_MARK.len_utf8());
            }
            Ok::<_, Error>(content)
        }
        .boxed()
    }

    fn release(&self, file: File) -> BoxFuture<'static, Result<(), Error>> {
        async move {
            drop(file);
            Ok::<_, Error>(())
        }
        .boxed()
    }
}
