mod inspect;
mod records;
