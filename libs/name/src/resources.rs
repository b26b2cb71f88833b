//! Resource-name facades for all platform resource types.
//!
//! Each facade owns the name template for one resource type. Nested
//! types name their parent facade and only spell the trailing suffix;
//! the full format is composed from the parent's format at first use.

use crate::define_name;

// =============================================================================
// Users
// =============================================================================

define_name!(UserNames, template: "users/{user}", variable: "user");

// =============================================================================
// Stores
// =============================================================================

define_name!(StoreNames, template: "stores/{store}", variable: "store");

// =============================================================================
// Store-Scoped Resources
// =============================================================================

define_name!(
    ProductNames,
    parent: StoreNames,
    suffix: "products/{product}",
    variable: "product",
    template: "stores/{store}/products/{product}",
);

define_name!(
    MembershipNames,
    parent: StoreNames,
    suffix: "memberships/{membership}",
    variable: "membership",
    template: "stores/{store}/memberships/{membership}",
);

define_name!(
    PaymentNames,
    parent: StoreNames,
    suffix: "payments/{payment}",
    variable: "payment",
    template: "stores/{store}/payments/{payment}",
);

define_name!(
    PurchaseNames,
    parent: StoreNames,
    suffix: "purchases/{purchase}",
    variable: "purchase",
    template: "stores/{store}/purchases/{purchase}",
);

// =============================================================================
// Tests
// =============================================================================
