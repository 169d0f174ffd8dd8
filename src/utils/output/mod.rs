mod array;
mod vec;

pub(crate) use array::OutputArray;
pub(crate) use vec::OutputVec;
