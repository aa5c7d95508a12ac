//! List query engine: search filtering, sorting, and pagination.
//!
//! Expressions arrive as `"field:substring"` (search) and `"field:order"`
//! (sort). Field access is typed: only the whitelisted [`UserField`]s can be
//! filtered or sorted, never an arbitrary attribute lookup.
//!
//! The two expressions fail differently on purpose, mirroring how callers
//! use them: a malformed or unknown-field search is simply no filter, while
//! a malformed sort aborts the whole call with
//! [`DomainError::InvalidSort`] rather than silently defaulting.

use bl_shared::types::{PaginatedResponse, Pagination};

use crate::domain::entities::User;
use crate::domain::value_objects::UserSummary;
use crate::errors::{DomainError, DomainResult};

/// Whitelisted fields a list query may filter or sort on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Name,
    Email,
}

impl UserField {
    /// Parse a field name; anything outside the whitelist is `None`
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            _ => None,
        }
    }

    /// String value of this field on a record
    fn value_of(&self, user: &User) -> String {
        match self {
            Self::Id => user.id.to_string(),
            Self::Name => user.name.clone(),
            Self::Email => user.email.clone(),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// A parsed `"field:substring"` search expression
#[derive(Debug, Clone)]
pub struct SearchFilter {
    field: UserField,
    needle: String,
}

impl SearchFilter {
    /// Parse a search expression.
    ///
    /// Returns `None`, meaning "no filter, match everything", when the
    /// expression is empty, has no colon, has an empty half, or names a
    /// field outside the whitelist. None of these are errors.
    pub fn parse(expr: &str) -> Option<Self> {
        let (field, needle) = expr.split_once(':')?;
        if field.is_empty() || needle.is_empty() {
            return None;
        }
        Some(Self {
            field: UserField::parse(field)?,
            needle: needle.to_lowercase(),
        })
    }

    /// Case-insensitive substring match against the record's field value
    fn matches(&self, user: &User) -> bool {
        self.field.value_of(user).to_lowercase().contains(&self.needle)
    }
}

/// A parsed `"field:order"` sort expression
#[derive(Debug, Clone)]
pub struct SortSpec {
    field: UserField,
    order: SortOrder,
}

impl SortSpec {
    /// Parse a sort expression.
    ///
    /// An empty expression means "keep store order" (`None`). Anything else
    /// must be a whitelisted field and an order in `{asc, desc}`; a bad
    /// order or unknown field is [`DomainError::InvalidSort`], never a
    /// silent default.
    pub fn parse(expr: &str) -> DomainResult<Option<Self>> {
        if expr.is_empty() {
            return Ok(None);
        }

        let (field_name, order_name) = expr.split_once(':').ok_or_else(|| {
            DomainError::InvalidSort {
                reason: format!("expected \"field:order\", got {:?}", expr),
            }
        })?;

        let field = UserField::parse(field_name).ok_or_else(|| DomainError::InvalidSort {
            reason: format!("unknown sort field {:?}", field_name),
        })?;

        let order = match order_name {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            other => {
                return Err(DomainError::InvalidSort {
                    reason: format!("unknown sort order {:?}", other),
                })
            }
        };

        Ok(Some(Self { field, order }))
    }
}

/// Run the list pipeline: filter, then sort, then paginate.
///
/// The order is fixed so that counts and page totals reflect the filtered
/// set. The sort expression is parsed before any other work, so an invalid
/// sort aborts without touching the collection.
pub fn list(
    users: Vec<User>,
    search_expr: &str,
    sort_expr: &str,
    pagination: Pagination,
) -> DomainResult<PaginatedResponse<UserSummary>> {
    let sort = SortSpec::parse(sort_expr)?;
    let filter = SearchFilter::parse(search_expr);

    let mut matched: Vec<User> = match &filter {
        Some(filter) => users.into_iter().filter(|u| filter.matches(u)).collect(),
        None => users,
    };

    if let Some(SortSpec { field, order }) = sort {
        // Stable sort: equal keys keep their store order.
        matched.sort_by(|a, b| {
            let ordering = field.value_of(a).cmp(&field.value_of(b));
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    let total = matched.len();
    let start = pagination.offset().min(total);
    let end = (start + pagination.page_size as usize).min(total);
    let data: Vec<UserSummary> = matched[start..end].iter().map(UserSummary::from).collect();

    Ok(PaginatedResponse::new(data, pagination, total))
}
