mod classify;
mod fields;
mod image;
mod toc;
