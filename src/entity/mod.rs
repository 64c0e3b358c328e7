pub mod customers;
pub mod inventories;
pub mod order_details;
pub mod orders;
pub mod product_movements;
pub mod products;
pub mod shipments;
pub mod supplier_products;
pub mod suppliers;
pub mod warehouses;

pub use customers::Entity as Customers;
pub use inventories::Entity as Inventories;
pub use order_details::Entity as OrderDetails;
pub use orders::Entity as Orders;
pub use product_movements::Entity as ProductMovements;
pub use products::Entity as Products;
pub use shipments::Entity as Shipments;
pub use supplier_products::Entity as SupplierProducts;
pub use suppliers::Entity as Suppliers;
pub use warehouses::Entity as Warehouses;
