mod editing;
mod history;
