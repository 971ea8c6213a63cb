/// Contact fields of an adopter that may be changed in place.
#[derive(Debug, Clone)]
pub struct AdopterContact {
    pub phone: String,
    pub email: String,
}
