use crate::domain::shared::pagination::SortDirection;

/// Product attribute a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSortField {
    #[default]
    Id,
    Name,
    Price,
    Date,
}

impl std::fmt::Display for ProductSortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductSortField::Id => write!(f, "id"),
            ProductSortField::Name => write!(f, "name"),
            ProductSortField::Price => write!(f, "price"),
            ProductSortField::Date => write!(f, "date"),
        }
    }
}

impl std::str::FromStr for ProductSortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(ProductSortField::Id),
            "name" => Ok(ProductSortField::Name),
            "price" => Ok(ProductSortField::Price),
            "date" => Ok(ProductSortField::Date),
            _ => Err(format!("Invalid product sort field: {}", s)),
        }
    }
}

/// Ordering of a product listing, written as `field` or `field,direction`
/// (e.g. `name`, `price,desc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProductSort {
    pub field: ProductSortField,
    pub direction: SortDirection,
}

impl ProductSort {
    pub fn new(field: ProductSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

impl std::fmt::Display for ProductSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

impl std::str::FromStr for ProductSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(',') {
            Some((field, direction)) => (field, direction.parse::<SortDirection>()?),
            None => (s, SortDirection::Asc),
        };

        Ok(Self {
            field: field.parse()?,
            direction,
        })
    }
}
