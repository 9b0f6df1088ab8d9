//! GraphQL Documents
//!
//! Operations sent to the admin API.

pub const PRODUCT_LIST_QUERY: &str = r#"
    query ProductList($options: ProductListOptions) {
        products(options: $options) {
            items {
                id
                createdAt
                updatedAt
                featuredAsset {
                    id
                    preview
                }
                name
                slug
                enabled
                description
                variants {
                    id
                    stockLevels {
                        id
                        stockOnHand
                        stockAllocated
                    }
                }
            }
            totalItems
        }
    }
"#;

pub const UPDATE_PRODUCT_ENABLED_MUTATION: &str = r#"
    mutation UpdateProductEnabled($input: UpdateProductInput!) {
        updateProduct(input: $input) {
            id
            enabled
        }
    }
"#;
