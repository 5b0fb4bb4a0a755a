
mod compose;
mod raw;
