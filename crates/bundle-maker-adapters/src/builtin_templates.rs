//! Built-in bundle templates.
//!
//! Text templates for the files whose shape is fixed: the two PHP classes,
//! the routes stub and the Twig page. Placeholders use the `{{VARIABLE}}`
//! syntax understood by [`RenderContext::render`].
//!
//! Structured documents (`composer.json`, `services.yaml`, the Flex recipe)
//! are not templates; see [`crate::renderer::documents`].
//!
//! [`RenderContext::render`]: bundle_maker_core::domain::RenderContext::render

/// Subdirectories of every bundle, in creation order. Each one receives a
/// `.gitkeep` marker.
pub const BUNDLE_DIRECTORIES: [&str; 12] = [
    "config",
    "src/Command",
    "src/Controller",
    "src/DependencyInjection",
    "src/EventSubscriber",
    "src/Security",
    "src/Service",
    "public",
    "translations",
    "templates",
    "tests",
    "assets",
];

/// `src/{{BUNDLE_NAME}}Bundle.php`
///
/// Registers the container extension through `getContainerExtensionClass()`.
pub const BUNDLE_CLASS: &str = r#"<?php
declare(strict_types=1);
namespace {{NAMESPACE}};

use {{NAMESPACE}}\DependencyInjection\{{BUNDLE_NAME}}Extension;
use Symfony\Component\HttpKernel\Bundle\Bundle;

class {{BUNDLE_NAME}}Bundle extends Bundle
{
    protected function getContainerExtensionClass(): string
    {
        return {{BUNDLE_NAME}}Extension::class;
    }
}"#;

/// `src/DependencyInjection/{{BUNDLE_NAME}}Extension.php`
///
/// Loads `config/services.yaml`, two levels above the class file.
pub const EXTENSION_CLASS: &str = r#"<?php
namespace {{NAMESPACE}}\DependencyInjection;

use Symfony\Component\DependencyInjection\ContainerBuilder;
use Symfony\Component\DependencyInjection\Extension\Extension;
use Symfony\Component\DependencyInjection\Loader\YamlFileLoader;
use Symfony\Component\Config\FileLocator;

class {{BUNDLE_NAME}}Extension extends Extension
{
    public function load(array $configs, ContainerBuilder $container)
    {
        $loader = new YamlFileLoader(
            $container,
            new FileLocator(__DIR__ . '/../../config')
        );
        $loader->load('services.yaml');
    }
}"#;

/// `config/routes.yaml`
pub const ROUTES_YAML: &str = "# Add your routes here\n";

/// `templates/index.html.twig`
pub const INDEX_TWIG: &str = "{# Twig template #}\n<h1>{{BUNDLE_NAME}} Bundle</h1>";
