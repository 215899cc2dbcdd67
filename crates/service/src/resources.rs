//! SeaORM-backed services for the organization-scoped tables.

use crate::crud::seaorm_crud_service;

seaorm_crud_service!(UserService, user, CreateUser, UpdateUser, "users", "user");
seaorm_crud_service!(TeamService, team, CreateTeam, UpdateTeam, "teams", "team");
seaorm_crud_service!(LocationService, location, CreateLocation, UpdateLocation, "locations", "location");
seaorm_crud_service!(CategoryService, category, CreateCategory, UpdateCategory, "categories", "category");
seaorm_crud_service!(AssetService, asset, CreateAsset, UpdateAsset, "assets", "asset");
seaorm_crud_service!(MeterService, meter, CreateMeter, UpdateMeter, "meters", "meter");
seaorm_crud_service!(VendorService, vendor, CreateVendor, UpdateVendor, "vendors", "vendor");
seaorm_crud_service!(
    /// Inventory parts.
    InventoryService, part, CreatePart, UpdatePart, "inventory", "part"
);
seaorm_crud_service!(ProcedureService, procedure, CreateProcedure, UpdateProcedure, "procedures", "procedure");
seaorm_crud_service!(AttachmentService, attachment, CreateAttachment, UpdateAttachment, "attachments", "attachment");
seaorm_crud_service!(
    /// Purchase orders. Nested shipping, cost and line-item payloads land in JSON columns.
    PurchaseOrderService, purchase_order, CreatePurchaseOrder, UpdatePurchaseOrder, "purchase-orders", "purchase order"
);
seaorm_crud_service!(
    /// Reminders as plain records; the sweep owns their status transitions.
    ReminderService, reminder, CreateReminder, UpdateReminder, "reminders", "reminder"
);
