use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        customers::{CreateCustomerRequest, CustomerList},
        inventory::{CreateInventoryRequest, CreateWarehouseRequest, InventoryList, WarehouseList},
        orders::{CreateOrderRequest, OrderLineRequest, OrderList, OrderWithDetails},
        products::{CreateProductRequest, ProductList},
        reports::{
            DistinctValueList, LowStockList, LowStockRow, MovementList, MovementRow,
            OrderLineTotalList, OrderLineTotalRow, OrderSummaryList, OrderSummaryRow,
            ShipmentSummaryList, ShipmentSummaryRow, SupplierCatalogList, SupplierCatalogRow,
        },
        shipments::{CreateShipmentRequest, MovementRequest, ShipmentList, ShipmentWithMovements},
        suppliers::{CreateSupplierRequest, SupplierList},
    },
    models::{
        Customer, Inventory, Order, OrderDetail, Product, ProductMovement, Shipment, Supplier,
        SupplierProduct, Warehouse,
    },
    response::{ApiResponse, Meta},
    routes::{
        customers, health, inventory, orders, params, products, reports, shipments, suppliers,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        suppliers::list_suppliers,
        suppliers::get_supplier,
        suppliers::create_supplier,
        suppliers::delete_supplier,
        customers::list_customers,
        customers::get_customer,
        customers::create_customer,
        customers::delete_customer,
        products::list_products,
        products::get_product,
        products::create_product,
        products::delete_product,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::delete_order,
        inventory::list_inventory,
        inventory::create_inventory,
        inventory::list_warehouses,
        inventory::create_warehouse,
        shipments::list_shipments,
        shipments::get_shipment,
        shipments::create_shipment,
        shipments::delete_shipment,
        reports::order_summaries,
        reports::orders_with_status,
        reports::orders_between,
        reports::order_line_totals,
        reports::low_stock,
        reports::stocked_categories,
        reports::heavy_shipments,
        reports::received_shipments,
        reports::shipped_movements,
        reports::products_by_price,
        reports::supplier_regions,
        reports::supplier_catalog
    ),
    components(
        schemas(
            Supplier,
            Customer,
            Product,
            Order,
            OrderDetail,
            Warehouse,
            Inventory,
            Shipment,
            ProductMovement,
            SupplierProduct,
            CreateSupplierRequest,
            SupplierList,
            CreateCustomerRequest,
            CustomerList,
            CreateProductRequest,
            ProductList,
            CreateOrderRequest,
            OrderLineRequest,
            OrderList,
            OrderWithDetails,
            CreateWarehouseRequest,
            WarehouseList,
            CreateInventoryRequest,
            InventoryList,
            CreateShipmentRequest,
            MovementRequest,
            ShipmentList,
            ShipmentWithMovements,
            OrderSummaryRow,
            OrderSummaryList,
            LowStockRow,
            LowStockList,
            ShipmentSummaryRow,
            ShipmentSummaryList,
            MovementRow,
            MovementList,
            OrderLineTotalRow,
            OrderLineTotalList,
            SupplierCatalogRow,
            SupplierCatalogList,
            DistinctValueList,
            params::Pagination,
            params::SupplierQuery,
            params::ProductQuery,
            params::OrderListQuery,
            params::ShipmentListQuery,
            Meta,
            ApiResponse<Supplier>,
            ApiResponse<SupplierList>,
            ApiResponse<OrderWithDetails>,
            ApiResponse<OrderSummaryList>,
            ApiResponse<LowStockList>,
            ApiResponse<DistinctValueList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Suppliers", description = "Supplier endpoints"),
        (name = "Customers", description = "Customer endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Inventory", description = "Warehouse and inventory endpoints"),
        (name = "Shipments", description = "Shipment endpoints"),
        (name = "Reports", description = "Read-only reporting queries"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
