use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of permission codes granted to roles by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    ViewDashboard,
    ViewCustomers,
    ViewCustomerDetails,
    CreateCustomer,
    EditCustomer,
    DeleteCustomer,
    ViewInvoices,
    ViewInvoiceDetails,
    CreateInvoice,
    EditInvoice,
    DeleteInvoice,
    SendInvoice,
    ViewPayments,
    ViewPaymentDetails,
    CreatePayment,
    ApplyPayment,
    ViewAgingReports,
    ExportAgingReport,
    ExportReports,
    ViewCollections,
    ViewReminder,
    SendReminder,
    ViewPromiseToPay,
    CreatePromiseToPay,
    UpdatePromiseToPay,
    ViewDispute,
    ViewDisputes,
    CreateDispute,
    ResolveDispute,
    ViewCompany,
    CreateCompany,
    UpdateCompany,
    DeleteCompany,
    ViewUser,
    InviteUser,
    ViewRoles,
    CreateRoles,
    ViewSetupAdmin,
    ManageCompanySettings,
    ManageUsers,
    ManageRoles,
}

impl Permission {
    pub const ALL: [Permission; 41] = [
        Permission::ViewDashboard,
        Permission::ViewCustomers,
        Permission::ViewCustomerDetails,
        Permission::CreateCustomer,
        Permission::EditCustomer,
        Permission::DeleteCustomer,
        Permission::ViewInvoices,
        Permission::ViewInvoiceDetails,
        Permission::CreateInvoice,
        Permission::EditInvoice,
        Permission::DeleteInvoice,
        Permission::SendInvoice,
        Permission::ViewPayments,
        Permission::ViewPaymentDetails,
        Permission::CreatePayment,
        Permission::ApplyPayment,
        Permission::ViewAgingReports,
        Permission::ExportAgingReport,
        Permission::ExportReports,
        Permission::ViewCollections,
        Permission::ViewReminder,
        Permission::SendReminder,
        Permission::ViewPromiseToPay,
        Permission::CreatePromiseToPay,
        Permission::UpdatePromiseToPay,
        Permission::ViewDispute,
        Permission::ViewDisputes,
        Permission::CreateDispute,
        Permission::ResolveDispute,
        Permission::ViewCompany,
        Permission::CreateCompany,
        Permission::UpdateCompany,
        Permission::DeleteCompany,
        Permission::ViewUser,
        Permission::InviteUser,
        Permission::ViewRoles,
        Permission::CreateRoles,
        Permission::ViewSetupAdmin,
        Permission::ManageCompanySettings,
        Permission::ManageUsers,
        Permission::ManageRoles,
    ];

    /// Wire code, e.g. `CREATE_INVOICE`
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "VIEW_DASHBOARD",
            Permission::ViewCustomers => "VIEW_CUSTOMERS",
            Permission::ViewCustomerDetails => "VIEW_CUSTOMER_DETAILS",
            Permission::CreateCustomer => "CREATE_CUSTOMER",
            Permission::EditCustomer => "EDIT_CUSTOMER",
            Permission::DeleteCustomer => "DELETE_CUSTOMER",
            Permission::ViewInvoices => "VIEW_INVOICES",
            Permission::ViewInvoiceDetails => "VIEW_INVOICE_DETAILS",
            Permission::CreateInvoice => "CREATE_INVOICE",
            Permission::EditInvoice => "EDIT_INVOICE",
            Permission::DeleteInvoice => "DELETE_INVOICE",
            Permission::SendInvoice => "SEND_INVOICE",
            Permission::ViewPayments => "VIEW_PAYMENTS",
            Permission::ViewPaymentDetails => "VIEW_PAYMENT_DETAILS",
            Permission::CreatePayment => "CREATE_PAYMENT",
            Permission::ApplyPayment => "APPLY_PAYMENT",
            Permission::ViewAgingReports => "VIEW_AGING_REPORTS",
            Permission::ExportAgingReport => "EXPORT_AGING_REPORT",
            Permission::ExportReports => "EXPORT_REPORTS",
            Permission::ViewCollections => "VIEW_COLLECTIONS",
            Permission::ViewReminder => "VIEW_REMINDER",
            Permission::SendReminder => "SEND_REMINDER",
            Permission::ViewPromiseToPay => "VIEW_PROMISE_TO_PAY",
            Permission::CreatePromiseToPay => "CREATE_PROMISE_TO_PAY",
            Permission::UpdatePromiseToPay => "UPDATE_PROMISE_TO_PAY",
            Permission::ViewDispute => "VIEW_DISPUTE",
            Permission::ViewDisputes => "VIEW_DISPUTES",
            Permission::CreateDispute => "CREATE_DISPUTE",
            Permission::ResolveDispute => "RESOLVE_DISPUTE",
            Permission::ViewCompany => "VIEW_COMPANY",
            Permission::CreateCompany => "CREATE_COMPANY",
            Permission::UpdateCompany => "UPDATE_COMPANY",
            Permission::DeleteCompany => "DELETE_COMPANY",
            Permission::ViewUser => "VIEW_USER",
            Permission::InviteUser => "INVITE_USER",
            Permission::ViewRoles => "VIEW_ROLES",
            Permission::CreateRoles => "CREATE_ROLES",
            Permission::ViewSetupAdmin => "VIEW_SETUP_ADMIN",
            Permission::ManageCompanySettings => "MANAGE_COMPANY_SETTINGS",
            Permission::ManageUsers => "MANAGE_USERS",
            Permission::ManageRoles => "MANAGE_ROLES",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|permission| permission.as_str() == s)
            .ok_or(())
    }
}

/// Permission tabs shown by the role editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionGroup {
    Dashboard,
    Customers,
    Invoices,
    Payments,
    Reports,
    Collections,
    Integration,
    Setup,
}

impl PermissionGroup {
    pub const ALL: [PermissionGroup; 8] = [
        PermissionGroup::Dashboard,
        PermissionGroup::Customers,
        PermissionGroup::Invoices,
        PermissionGroup::Payments,
        PermissionGroup::Reports,
        PermissionGroup::Collections,
        PermissionGroup::Integration,
        PermissionGroup::Setup,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PermissionGroup::Dashboard => "Dashboard",
            PermissionGroup::Customers => "Customers",
            PermissionGroup::Invoices => "Invoices",
            PermissionGroup::Payments => "Payments",
            PermissionGroup::Reports => "Aging & Reports",
            PermissionGroup::Collections => "Collections & Disputes",
            PermissionGroup::Integration => "Integration",
            PermissionGroup::Setup => "Setup / Admin",
        }
    }

    /// Permissions assignable from this tab. Integration has none yet.
    pub fn permissions(&self) -> &'static [Permission] {
        use Permission::*;
        match self {
            PermissionGroup::Dashboard => &[ViewDashboard],
            PermissionGroup::Customers => &[
                ViewCustomers,
                ViewCustomerDetails,
                CreateCustomer,
                EditCustomer,
                DeleteCustomer,
            ],
            PermissionGroup::Invoices => &[
                ViewInvoices,
                ViewInvoiceDetails,
                CreateInvoice,
                EditInvoice,
                DeleteInvoice,
                SendInvoice,
            ],
            PermissionGroup::Payments => &[ViewPayments, ViewPaymentDetails, CreatePayment, ApplyPayment],
            PermissionGroup::Reports => &[ViewAgingReports, ExportAgingReport, ExportReports],
            PermissionGroup::Collections => &[
                ViewCollections,
                ViewPromiseToPay,
                CreatePromiseToPay,
                UpdatePromiseToPay,
                ViewDisputes,
                CreateDispute,
                ResolveDispute,
            ],
            PermissionGroup::Integration => &[],
            PermissionGroup::Setup => &[
                ViewSetupAdmin,
                ManageCompanySettings,
                ManageUsers,
                ManageRoles,
                InviteUser,
            ],
        }
    }

    /// The tab a permission is edited from, if any
    pub fn of(permission: Permission) -> Option<PermissionGroup> {
        PermissionGroup::ALL
            .iter()
            .copied()
            .find(|group| group.permissions().contains(&permission))
    }
}
