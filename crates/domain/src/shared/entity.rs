pub trait Entity<T: PartialEq> {
    fn id(&self) -> T;
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
