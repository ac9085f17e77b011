mod splitter;

pub use splitter::{
    DocumentSplitter, RecursiveCharacterTextSplitter, RecursiveCharacterTextSplitterBuilder,
    SplitterConfigError,
};
