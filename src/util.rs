mod iter;

pub(crate) use iter::IterChunks;
