pub(crate) mod bubble_sorter;
pub(crate) mod insertion_sorter;
pub(crate) mod quick_sorter;
pub(crate) mod selection_sorter;
